use crate::models::DayResponse;

pub fn render_index(view: &DayResponse) -> String {
    let mut page = INDEX_HTML
        .replace("{{DATE}}", &view.date)
        .replace("{{PERCENT}}", &format!("{:.1}", view.progress.percent));
    for reading in &view.readings {
        let slot = format!("{{{{TRACK{}}}}}", reading.track);
        page = page.replace(&slot, &reading.label);
    }
    page
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Daily Reading Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f6f2fb;
      --bg-2: #ded0f2;
      --ink: #272233;
      --accent: #8b5cf6;
      --accent-deep: #6d28d9;
      --muted: #6f6880;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(77, 52, 128, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ece2fa 60%, #f8f4fd 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(680px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    header {
      display: flex;
      align-items: baseline;
      justify-content: space-between;
      gap: 16px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.4rem, 3.5vw, 1.9rem);
      margin: 0;
    }

    .subtitle {
      margin: 4px 0 0;
      color: var(--muted);
      font-size: 0.95rem;
    }

    button {
      appearance: none;
      border: none;
      background: none;
      font: inherit;
      cursor: pointer;
    }

    .btn-today {
      color: var(--accent-deep);
      font-weight: 600;
      padding: 8px 14px;
      border-radius: 999px;
      transition: background 150ms ease;
    }

    .btn-today:hover {
      background: rgba(139, 92, 246, 0.12);
    }

    .tracks {
      background: rgba(139, 92, 246, 0.06);
      border-radius: 24px;
      padding: 24px;
      display: grid;
      grid-template-columns: repeat(4, 1fr);
      gap: 18px;
    }

    .track {
      display: grid;
      justify-items: center;
      gap: 8px;
    }

    .ring {
      width: 86px;
      height: 86px;
      border-radius: 50%;
      border: 2px solid #d4cbe2;
      background: white;
      display: flex;
      align-items: center;
      justify-content: center;
      padding: 8px;
      text-align: center;
      transition: transform 150ms ease, background 150ms ease, border-color 150ms ease;
    }

    .ring:active {
      transform: scale(0.96);
    }

    .ring .ref {
      font-size: 0.62rem;
      line-height: 1.3;
      word-break: keep-all;
    }

    .ring.done {
      background: var(--accent);
      border-color: var(--accent);
      color: white;
    }

    .track .label {
      font-size: 0.8rem;
      color: var(--muted);
    }

    .progress {
      margin: 0;
      text-align: center;
      color: var(--muted);
    }

    .progress strong {
      color: var(--accent-deep);
    }

    .calendar {
      border-top: 1px solid rgba(39, 34, 51, 0.1);
      padding-top: 24px;
      display: grid;
      gap: 12px;
    }

    .calendar-header {
      display: flex;
      align-items: center;
      justify-content: space-between;
    }

    .calendar-header h2 {
      margin: 0;
      font-size: 1.1rem;
      font-weight: 600;
    }

    .calendar-header button {
      font-size: 1.4rem;
      color: var(--accent-deep);
      padding: 4px 12px;
      border-radius: 999px;
    }

    .calendar-header button:hover {
      background: rgba(139, 92, 246, 0.12);
    }

    .weekdays,
    .grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 6px;
      text-align: center;
    }

    .weekdays div {
      font-size: 0.78rem;
      color: var(--muted);
    }

    .cell {
      height: 44px;
      display: flex;
      align-items: center;
      justify-content: center;
      border-radius: 999px;
      font-size: 0.9rem;
    }

    .cell.day:hover {
      background: rgba(139, 92, 246, 0.12);
    }

    .cell.selected {
      background: var(--accent);
      color: white;
    }

    .cell.today {
      border: 1px solid var(--accent);
    }

    .status {
      font-size: 0.9rem;
      color: var(--muted);
      min-height: 1.2em;
      text-align: center;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    @media (max-width: 540px) {
      .app {
        padding: 28px 20px;
      }
      .tracks {
        grid-template-columns: repeat(2, 1fr);
      }
    }
  </style>
</head>
<body data-today="{{DATE}}">
  <main class="app">
    <header>
      <div>
        <h1 id="selected-date">{{DATE}}</h1>
        <p class="subtitle">Four tracks a day, today and tomorrow together.</p>
      </div>
      <button id="today-btn" class="btn-today" type="button">Today</button>
    </header>

    <section class="tracks">
      <div class="track" data-track="1">
        <button class="ring" type="button" aria-pressed="false"><span class="ref">{{TRACK1}}</span></button>
        <span class="label">Track 1</span>
      </div>
      <div class="track" data-track="2">
        <button class="ring" type="button" aria-pressed="false"><span class="ref">{{TRACK2}}</span></button>
        <span class="label">Track 2</span>
      </div>
      <div class="track" data-track="3">
        <button class="ring" type="button" aria-pressed="false"><span class="ref">{{TRACK3}}</span></button>
        <span class="label">Track 3</span>
      </div>
      <div class="track" data-track="4">
        <button class="ring" type="button" aria-pressed="false"><span class="ref">{{TRACK4}}</span></button>
        <span class="label">Track 4</span>
      </div>
    </section>

    <p class="progress">Plan progress: <strong id="percent">{{PERCENT}}%</strong></p>

    <section class="calendar">
      <div class="calendar-header">
        <button id="prev-month" type="button" aria-label="Previous month">&#8249;</button>
        <h2 id="month-label"></h2>
        <button id="next-month" type="button" aria-label="Next month">&#8250;</button>
      </div>
      <div class="weekdays">
        <div>Sun</div><div>Mon</div><div>Tue</div><div>Wed</div><div>Thu</div><div>Fri</div><div>Sat</div>
      </div>
      <div class="grid" id="calendar-grid"></div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const MONTHS = ['January', 'February', 'March', 'April', 'May', 'June', 'July',
      'August', 'September', 'October', 'November', 'December'];

    const dateEl = document.getElementById('selected-date');
    const percentEl = document.getElementById('percent');
    const statusEl = document.getElementById('status');
    const monthLabelEl = document.getElementById('month-label');
    const gridEl = document.getElementById('calendar-grid');

    let selectedDate = document.body.dataset.today;
    let cursor = selectedDate;
    let serverToday = selectedDate;
    let lastCalendar = null;

    const pad2 = (n) => String(n).padStart(2, '0');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const formatDate = (iso) =>
      new Date(`${iso}T00:00:00`).toLocaleDateString(undefined, {
        year: 'numeric',
        month: 'long',
        day: 'numeric'
      });

    const renderDay = (data) => {
      selectedDate = data.date;
      dateEl.textContent = formatDate(data.date);
      data.readings.forEach((reading) => {
        const cell = document.querySelector(`.track[data-track="${reading.track}"]`);
        cell.querySelector('.ref').textContent = reading.label;
        const ring = cell.querySelector('.ring');
        ring.classList.toggle('done', reading.completed);
        ring.setAttribute('aria-pressed', String(reading.completed));
      });
      percentEl.textContent = `${data.progress.percent.toFixed(1)}%`;
    };

    const paintCalendar = (data) => {
      lastCalendar = data;
      cursor = data.cursor;
      serverToday = data.today;
      monthLabelEl.textContent = `${MONTHS[data.grid.month - 1]} ${data.grid.year}`;
      gridEl.innerHTML = '';
      data.grid.cells.forEach((cell) => {
        if (cell === null) {
          const blank = document.createElement('div');
          blank.className = 'cell blank';
          gridEl.appendChild(blank);
          return;
        }
        const dateStr = `${data.grid.year}-${pad2(data.grid.month)}-${pad2(cell)}`;
        const button = document.createElement('button');
        button.type = 'button';
        button.className = 'cell day';
        button.textContent = cell;
        if (dateStr === selectedDate) {
          button.classList.add('selected');
        } else if (dateStr === serverToday) {
          button.classList.add('today');
        }
        button.addEventListener('click', () => selectDay(dateStr));
        gridEl.appendChild(button);
      });
    };

    const loadDay = async (date) => {
      const res = await fetch(`/api/day?date=${date}`);
      if (!res.ok) {
        throw new Error('Unable to load readings');
      }
      renderDay(await res.json());
    };

    const loadCalendar = async (shift) => {
      const res = await fetch(`/api/calendar?cursor=${cursor}&shift=${shift}`);
      if (!res.ok) {
        throw new Error('Unable to load calendar');
      }
      paintCalendar(await res.json());
    };

    const selectDay = (date) => {
      selectedDate = date;
      cursor = date;
      Promise.all([loadDay(date), loadCalendar(0)])
        .catch((err) => setStatus(err.message, 'error'));
    };

    const toggleTrack = async (track) => {
      const res = await fetch('/api/toggle', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ date: selectedDate, track })
      });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      renderDay(await res.json());
    };

    document.querySelectorAll('.track').forEach((cell) => {
      const track = Number(cell.dataset.track);
      cell.querySelector('.ring').addEventListener('click', () => {
        toggleTrack(track).catch((err) => setStatus(err.message, 'error'));
      });
    });

    document.getElementById('today-btn').addEventListener('click', () => {
      fetch('/api/today')
        .then((res) => {
          if (!res.ok) {
            throw new Error('Unable to load today');
          }
          return res.json();
        })
        .then((data) => {
          renderDay(data);
          // selection highlight moves, the month cursor stays put
          if (lastCalendar) {
            paintCalendar(lastCalendar);
          }
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('prev-month').addEventListener('click', () => {
      loadCalendar(-1).catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('next-month').addEventListener('click', () => {
      loadCalendar(1).catch((err) => setStatus(err.message, 'error'));
    });

    if ('serviceWorker' in navigator) {
      navigator.serviceWorker.register('/service-worker.js').catch(() => {});
    }

    Promise.all([loadDay(selectedDate), loadCalendar(0)])
      .catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
